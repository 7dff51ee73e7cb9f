mod error;
mod header;
mod message;
mod name;
mod record;
mod reply;
mod server;

use std::net::Ipv4Addr;

use clap::Parser;
use log::info;

use server::Server;

#[derive(Parser, Debug)]
#[command(name = "stubdns")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:2053")]
    bind: String,

    /// IPv4 address returned in every A answer
    #[arg(long, default_value = "8.8.8.8")]
    answer_addr: Ipv4Addr,

    /// TTL in seconds for synthesized answers
    #[arg(long, default_value_t = 60)]
    ttl: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    info!(
        "listening on {}, answering with {}",
        args.bind, args.answer_addr
    );

    let server = Server::bind(&args.bind, args.answer_addr, args.ttl)?;
    server.run()
}
