use pokedex;

mod alexa;
mod config;
mod server;
mod skill;
mod speech;

use crate::config::Config;
use crate::pokedex::Session;
use crate::skill::Skill;

#[tokio::main]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let config = Config::load().await?;
    let session = Session::new(config.endpoint, config.user_agent);

    server::run(config.address, Skill::new(session)).await
}
