use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dkg_private_resolver::run().await
}
