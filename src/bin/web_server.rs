use yen_ksp::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env();

    // A port given on the command line wins over KSP_PORT
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        config.port = args[1].parse().unwrap_or(config.port);
    }

    println!("🔧 Starting K Shortest Paths Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Port: {}", config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   🔢 Max vertices: {}", config.max_vertices);
    println!("   🛣️  Max k: {}", config.max_k);
    println!();

    // Start the server
    start_server_with_config(config).await?;

    Ok(())
}
