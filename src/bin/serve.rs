use std::{
    env,
    io::{BufRead, BufReader, Write},
    net::{TcpListener, TcpStream},
};

use tracing::{error, info, warn};

use lander::{
    server::{Reply, Session},
    utils::init_logging,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info");

    let port: u16 = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 0,
    };
    let listener = TcpListener::bind(("127.0.0.1", port))?;
    // Clients read the port from stdout
    println!("PORT={}", listener.local_addr()?.port());

    let (stream, addr) = listener.accept()?;
    info!("Client connected from {}", addr);

    serve(stream)?;
    info!("Server shutting down");
    Ok(())
}

/// Answer line-delimited JSON commands until Close or EOF
fn serve(stream: TcpStream) -> std::io::Result<()> {
    let mut writer = stream.try_clone()?;
    let reader = BufReader::new(stream);
    let mut session = Session::new();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error reading from client: {}", e);
                return Err(e);
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let Reply { body, close } = session.handle_line(&line);
        let response = serde_json::to_string(&body)? + "\n";
        writer.write_all(response.as_bytes())?;
        writer.flush()?;

        if close {
            return Ok(());
        }
    }

    warn!("Client disconnected without Close");
    Ok(())
}
