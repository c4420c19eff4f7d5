// This is the entry point for the keypair converter CLI
// Everything it does lives in the library; here I only parse and dispatch
use clap::Parser;
use keypair_convert::{
    base58_encode, base58_to_wallet, convert_default, read_first_line, wallet_to_base58, Command,
    Keypair, Opt, Result,
};
use log::{error, LevelFilter};
use std::io;
use std::process;

fn main() {
    // I initialize logging at Warn so a successful conversion prints nothing
    // RUST_LOG still overrides it when I want to see what happened
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    // I parse the command line with clap; no arguments at all is valid
    let opt = Opt::parse();

    // Any failure gets logged and the process exits with code 1
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle the different CLI commands
fn run_command(command: Option<Command>) -> Result<()> {
    // Without a subcommand I run the plain conversion
    match command.unwrap_or(Command::Convert) {
        // I read ./dev-wallet.json and write ./convert-result-dev-wallet.json
        // The result file holds [<base58>] and nothing is printed
        Command::Convert => {
            convert_default()?;
        }
        // When I have a wallet byte array and want the base58 private key
        Command::ToBase58 => {
            // Prompts go to stderr so stdout only carries the result
            eprintln!("Input your private key as a wallet file byte array:");
            let line = read_first_line(io::stdin().lock())?;
            eprintln!("Your private key is:");
            println!("{}", wallet_to_base58(&line)?);
        }
        // When I have a base58 private key and want the wallet file contents back
        Command::FromBase58 => {
            eprintln!("Input your private key as base58:");
            let line = read_first_line(io::stdin().lock())?;
            eprintln!("Your wallet file is:");
            println!("{}", base58_to_wallet(&line)?);
        }
        // When I want the public key of a 64-byte keypair file
        Command::Pubkey { path } => {
            let keypair = Keypair::from_file(&path)?;
            // I derive it from the seed and refuse files whose public half disagrees
            let public_key = keypair.verified_public_key()?;
            eprintln!("Your public key is:");
            println!("{}", base58_encode(&public_key));
        }
        // When I need a brand new wallet
        Command::Keygen => {
            // I generate a fresh seed and append its public key, Solana style
            let keypair = Keypair::generate()?;
            let public_key = keypair.verified_public_key()?;
            println!(
                "You've generated a new Solana wallet: {}",
                base58_encode(&public_key)
            );
            println!();
            // The byte array can be pasted straight into dev-wallet.json
            println!("To save your wallet, copy and paste the following into a JSON file:");
            println!("{}", keypair.to_json_array()?);
        }
    }
    Ok(())
}
