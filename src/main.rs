#[tokio::main]
async fn main() {
    kikundi_backend::run().await;
}
