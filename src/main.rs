#[tokio::main]
async fn main() {
    if let Err(e) = portfolio_site_lib::run().await {
        eprintln!("portfolio-site: {}", e);
        std::process::exit(1);
    }
}
