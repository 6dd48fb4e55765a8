mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use lander::server::{Command, Response, Session};

fn initialized_session() -> Session {
    let mut session = Session::new();
    let reply = session.handle(Command::Initialize {
        config: json!({ "seed": 3, "wind": { "enabled": false } }),
    });
    assert_eq!(reply.body["status"], "ready");
    session
}

fn response(body: Value) -> Response {
    serde_json::from_value(body).expect("response body")
}

#[test]
fn test_ready_reply_describes_spaces() {
    let mut session = Session::new();
    let reply = session.handle_line(r#"{"Initialize":{"config":{}}}"#);

    assert!(!reply.close);
    assert_eq!(reply.body["status"], "ready");
    assert_eq!(reply.body["action_space"]["rotors"], 2);
    assert_eq!(reply.body["action_space"]["levels"], 3);
    assert_eq!(reply.body["observation_space"]["size"], 8);
    assert!(session.is_initialized());
}

#[test]
fn test_commands_before_initialize_fail() {
    let mut session = Session::new();
    let reply = session.handle(Command::Reset { seed: None });
    assert!(reply.body.get("error").is_some());

    let reply = session.handle(Command::Step { action: vec![1, 1] });
    assert!(reply.body.get("error").is_some());
}

#[test]
fn test_double_initialize_is_rejected() {
    let mut session = initialized_session();
    let reply = session.handle(Command::Initialize { config: json!({}) });
    assert_eq!(reply.body["error"], "Server already initialized");
}

#[test]
fn test_invalid_config_is_reported() {
    let mut session = Session::new();
    let reply = session.handle(Command::Initialize {
        config: json!({ "physics": { "timestep": 5.0 } }),
    });
    assert!(reply.body.get("error").is_some());
    assert!(!session.is_initialized());
}

#[test]
fn test_reset_and_step_round_trip() {
    let mut session = initialized_session();

    let reset = response(session.handle_line(r#"{"Reset":{"seed":9}}"#).body);
    assert_eq!(reset.reward, 0.0);
    assert!(!reset.terminated);
    assert_eq!(reset.info["episode"], 1);
    assert_eq!(reset.info["contact_count"], 0);
    assert_eq!(reset.info["named_obs"]["x"].as_f64(), Some(reset.obs.0[0]));

    let step = response(session.handle_line(r#"{"Step":{"action":[2,2]}}"#).body);
    assert_eq!(step.info["step"], 1);
    assert!(step.obs.0[4] > reset.obs.0[4], "full thrust raises vy");
}

#[test]
fn test_reset_with_seed_is_reproducible() {
    let mut session = initialized_session();
    let first = response(session.handle(Command::Reset { seed: Some(5) }).body);
    session.handle(Command::Reset { seed: None });
    let again = response(session.handle(Command::Reset { seed: Some(5) }).body);
    assert_eq!(first.obs, again.obs);
}

#[test]
fn test_out_of_range_levels_are_clamped() {
    let mut session = initialized_session();
    session.handle(Command::Reset { seed: Some(1) });
    let reply = session.handle(Command::Step { action: vec![9, -4] });
    assert!(reply.body.get("error").is_none());

    let reply = session.handle(Command::Step { action: vec![1] });
    assert!(reply.body.get("error").is_some());
}

#[test]
fn test_step_after_termination_reports_error() {
    let mut session = initialized_session();
    session.handle(Command::Reset { seed: Some(2) });

    let mut terminated = false;
    for _ in 0..1000 {
        let reply = session.handle(Command::Step { action: vec![2, 2] });
        if response(reply.body).terminated {
            terminated = true;
            break;
        }
    }
    assert!(terminated, "full thrust leaves through the ceiling");

    let reply = session.handle(Command::Step { action: vec![1, 1] });
    assert!(reply.body["error"]
        .as_str()
        .is_some_and(|msg| msg.contains("reset required")));
}

#[test]
fn test_malformed_line_and_close() {
    let mut session = Session::new();
    let reply = session.handle_line("not json");
    assert!(reply.body.get("error").is_some());
    assert!(!reply.close);

    let reply = session.handle_line(r#""Close""#);
    assert!(reply.close);
    assert_eq!(reply.body["status"], "closed");
}
