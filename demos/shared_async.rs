//! Serve the backend to concurrent async tasks.
//!
//! Run with: cargo run --example shared_async --features tokio

use tapwake::{AsyncSharedGestures, Config, Gestures};

#[tokio::main]
async fn main() {
    env_logger::init();

    let shared = AsyncSharedGestures::new(Gestures::select(&Config::default()));
    println!("Backend: {:?}", shared.kind().await);

    let tasks: Vec<_> = [true, false, true]
        .into_iter()
        .map(|value| {
            let shared = shared.clone();
            tokio::spawn(async move { shared.set_enabled(value).await })
        })
        .collect();
    for task in tasks {
        task.await.expect("task panicked");
    }

    println!(
        "supported: {}, enabled: {}",
        shared.supported().await,
        shared.enabled().await
    );
}
