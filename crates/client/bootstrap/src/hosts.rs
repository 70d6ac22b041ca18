//! Host construction from built-in content.
use wumpus_content::MapCatalog;
use wumpus_core::{GameConfig, HostError, HostFactory, HostOptions, MapRef, WumpusHost};

/// Host factory that resolves maps through [`MapCatalog`].
#[derive(Clone, Debug, Default)]
pub struct ContentHostFactory {
    config: GameConfig,
}

impl ContentHostFactory {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl HostFactory for ContentHostFactory {
    type Host = WumpusHost;

    fn create(
        &self,
        seed: u64,
        map: &MapRef,
        options: HostOptions,
    ) -> Result<WumpusHost, HostError> {
        let cave = MapCatalog::load(map).ok_or_else(|| HostError::UnknownMap { map: map.clone() })?;
        WumpusHost::with_config(seed, cave, options, self.config.clone())
    }
}
