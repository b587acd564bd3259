use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Bazaar.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Bazaar.toml").exists() {
            builder = builder.add_source(File::new("Bazaar.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Moderation {
    /// Simulated latency of the commit step, in milliseconds
    pub commit_latency_ms: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeaturesLimits {
    pub max_page_size: usize,
    pub warning_message_length: usize,
    pub removal_comment_length: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Features {
    pub limits: FeaturesLimits,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub moderation: Moderation,
    pub features: Features,
}

pub async fn init() {
    println!(
        ":: Bazaar Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}
