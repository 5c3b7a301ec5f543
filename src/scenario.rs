//! # NEO scenario: loading and publishing near Earth objects
//!
//! This module defines [`NeoScenario`], the context object that owns everything a load cycle
//! touches:
//!
//! 1. **Scenario descriptor** ([`ScenarioDescriptor`]) — name, reference bodies, tick-rate bounds,
//!    display defaults and help text handed to the simulation engine.
//! 2. **Transport** ([`NeoTransport`]) — the network capability used for every request.
//! 3. **Load memo** — a lazily created, shared [`LoadHandle`]; the pipeline runs at most once.
//! 4. **Body registry** — the currently published [`BodyRegistry`] snapshot.
//!
//! ## Load pipeline
//!
//! ```text
//! load() ──► GET feed?start_date=YYYY-MM-DD&api_key=…
//!        ──► rank_close_approaches (filter < threshold, sort, take N)
//!        ──► DetailFetcher::fetch × N   (concurrent, all must succeed)
//!        ──► registry.merged(bodies) ──► publish
//! ```
//!
//! ## States
//!
//! | state     | memo                    | registry                     |
//! |-----------|-------------------------|------------------------------|
//! | `Idle`    | empty                   | reference bodies             |
//! | `Loading` | unsettled handle        | reference bodies             |
//! | `Loaded`  | settled with `Ok`       | reference bodies + NEOs      |
//! | `Failed`  | settled with `Err`      | reference bodies (untouched) |
//!
//! Every `load()` after the first returns the memoized handle, including a failed one: a
//! failed cycle is never retried.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use neo_scenario::config::NeoFeedConfig;
//! use neo_scenario::scenario::NeoScenario;
//!
//! # async fn run() {
//! let scenario = NeoScenario::with_http(NeoFeedConfig::default(), Vec::new());
//! match scenario.load().await {
//!     Ok(bodies) => println!("{} bodies", bodies.len()),
//!     Err(err) => eprintln!("NEO load failed: {err}"),
//! }
//! # }
//! ```
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock};
use std::task::{Context, Poll};

use futures::future::{join_all, BoxFuture, FutureExt, Shared};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::body::descriptor::BodyDescriptor;
use crate::body::registry::BodyRegistry;
use crate::config::NeoFeedConfig;
use crate::feed::decode_json;
use crate::feed::detail::DetailFetcher;
use crate::feed::feed_records::FeedResponse;
use crate::feed::ranker::rank_close_approaches;
use crate::neo_errors::NeoError;
use crate::time::feed_start_date;
use crate::transport::{HttpTransport, NeoTransport};

/// Outcome of a load cycle, shared by every clone of the handle
pub type LoadResult = Result<Arc<BodyRegistry>, Arc<NeoError>>;

/// Shared, memoized handle on a load cycle.
///
/// Awaiting any clone yields the same [`LoadResult`]; the underlying pipeline is only run once.
#[derive(Clone)]
pub struct LoadHandle {
    inner: Shared<BoxFuture<'static, LoadResult>>,
}

impl LoadHandle {
    fn new(pipeline: BoxFuture<'static, LoadResult>) -> Self {
        LoadHandle {
            inner: pipeline.shared(),
        }
    }

    /// True if both handles refer to the same load cycle
    pub fn same_cycle(&self, other: &LoadHandle) -> bool {
        self.inner.ptr_eq(&other.inner)
    }

    /// The outcome if the cycle has settled
    pub fn peek(&self) -> Option<&LoadResult> {
        self.inner.peek()
    }
}

impl Future for LoadHandle {
    type Output = LoadResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

impl std::fmt::Debug for LoadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.peek() {
            None => "loading",
            Some(Ok(_)) => "loaded",
            Some(Err(_)) => "failed",
        };
        f.debug_struct("LoadHandle").field("state", &state).finish()
    }
}

/// Observable state of the scenario's load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Bounds of the simulated seconds per rendering tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate {
    pub min: u32,
    pub max: u32,
    pub initial: u32,
}

/// Display settings applied when the scenario is opened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuiSettings {
    pub planet_scale: f64,
}

/// Static description of the scenario, as exposed to the simulation engine
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioDescriptor {
    pub name: String,
    pub title: String,
    /// Non-NEO bodies (sun, planets, moon) always present in the registry
    pub common_bodies: Vec<BodyDescriptor>,
    pub seconds_per_tick: TickRate,
    pub default_gui_settings: GuiSettings,
    pub help: String,
}

impl ScenarioDescriptor {
    /// Descriptor of the near Earth object scenario.
    ///
    /// Arguments
    /// ---------
    /// * `config`: used to word the help text (number of passages, distance threshold)
    /// * `common_bodies`: reference bodies supplied by the host application
    pub fn near_earth_objects(config: &NeoFeedConfig, common_bodies: Vec<BodyDescriptor>) -> Self {
        ScenarioDescriptor {
            name: "NEO".to_string(),
            title: "Near Earth Objects".to_string(),
            common_bodies,
            seconds_per_tick: TickRate {
                min: 60,
                max: 3600 * 5,
                initial: 3600,
            },
            default_gui_settings: GuiSettings { planet_scale: 1.0 },
            help: format!(
                "This scenario shows the next {} passages closer than {} AU of near Earth objects \
                 from Nasa's Near Earth Object Project (http://neo.jpl.nasa.gov/).",
                config.max_candidates, config.max_miss_distance_au
            ),
        }
    }
}

/// Fetch the list feed, rank it and retrieve every selected object.
///
/// The detail requests are issued concurrently and all of them are awaited; the call fails if
/// any of them failed, in which case no body is returned.
///
/// Arguments
/// ---------
/// * `config`: feed location, credentials and ranking bounds
/// * `transport`: network capability
///
/// Return
/// ------
/// * the converted bodies, closest approach first
/// * the first error in ranking order otherwise
pub async fn fetch_neo_bodies(
    config: &NeoFeedConfig,
    transport: Arc<dyn NeoTransport>,
) -> Result<Vec<BodyDescriptor>, NeoError> {
    let start_date = feed_start_date(config.start_date.as_deref())?;
    info!(%start_date, "loading near earth object feed");

    let body = transport
        .get_text(
            &config.feed_url,
            &[
                ("start_date", start_date.as_str()),
                ("api_key", config.api_key.as_str()),
            ],
        )
        .await?;
    let feed: FeedResponse = decode_json(&config.feed_url, &body)?;
    if feed.near_earth_objects.is_none() {
        return Err(NeoError::MissingFeedData(config.feed_url.clone()));
    }

    let candidates = rank_close_approaches(&feed, &config.ranking_params());
    info!(
        candidates = candidates.len(),
        max_miss_distance_au = config.max_miss_distance_au,
        "close approaches selected"
    );

    let fetcher = DetailFetcher::new(transport, config.reject_invalid_elements);
    join_all(candidates.iter().map(|candidate| fetcher.fetch(candidate)))
        .await
        .into_iter()
        .collect()
}

/// Context object of the near Earth object scenario.
///
/// Owns the memoized load cycle and the published body registry. Cloning is not supported:
/// share it behind an [`Arc`] instead.
pub struct NeoScenario {
    descriptor: ScenarioDescriptor,
    config: NeoFeedConfig,
    transport: Arc<dyn NeoTransport>,
    load: OnceCell<LoadHandle>,
    bodies: Arc<RwLock<Arc<BodyRegistry>>>,
}

impl NeoScenario {
    /// Create an idle scenario whose registry holds the reference bodies.
    ///
    /// Arguments
    /// ---------
    /// * `config`: feed configuration
    /// * `transport`: network capability used by the load cycle
    /// * `common_bodies`: reference bodies (sun, planets, moon)
    pub fn new(
        config: NeoFeedConfig,
        transport: Arc<dyn NeoTransport>,
        common_bodies: Vec<BodyDescriptor>,
    ) -> Self {
        let registry = BodyRegistry::from_bodies(common_bodies.iter().cloned());
        NeoScenario {
            descriptor: ScenarioDescriptor::near_earth_objects(&config, common_bodies),
            config,
            transport,
            load: OnceCell::new(),
            bodies: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// Same as [`NeoScenario::new`] with an [`HttpTransport`]
    pub fn with_http(config: NeoFeedConfig, common_bodies: Vec<BodyDescriptor>) -> Self {
        Self::new(config, Arc::new(HttpTransport::new()), common_bodies)
    }

    pub fn descriptor(&self) -> &ScenarioDescriptor {
        &self.descriptor
    }

    pub fn config(&self) -> &NeoFeedConfig {
        &self.config
    }

    /// The currently published registry
    pub fn bodies(&self) -> Arc<BodyRegistry> {
        self.bodies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> LoadState {
        match self.load.get().map(LoadHandle::peek) {
            None => LoadState::Idle,
            Some(None) => LoadState::Loading,
            Some(Some(Ok(_))) => LoadState::Loaded,
            Some(Some(Err(_))) => LoadState::Failed,
        }
    }

    /// Start the load cycle, or return the one already started.
    ///
    /// The first call creates the handle and, when called inside a tokio runtime, starts the
    /// pipeline right away; otherwise it starts on the first poll of the handle. On success the
    /// NEO bodies are merged into the registry (same name overwrites) and the merged snapshot is
    /// published. On failure the registry is left untouched.
    ///
    /// Return
    /// ------
    /// * the memoized [`LoadHandle`], identical for every call
    pub fn load(&self) -> LoadHandle {
        self.load
            .get_or_init(|| {
                let handle = LoadHandle::new(self.load_pipeline());
                if let Ok(runtime) = tokio::runtime::Handle::try_current() {
                    runtime.spawn(handle.clone());
                }
                handle
            })
            .clone()
    }

    fn load_pipeline(&self) -> BoxFuture<'static, LoadResult> {
        let config = self.config.clone();
        let transport = Arc::clone(&self.transport);
        let bodies = Arc::clone(&self.bodies);

        async move {
            match fetch_neo_bodies(&config, transport).await {
                Ok(neos) => {
                    let count = neos.len();
                    let mut published = bodies.write().unwrap_or_else(PoisonError::into_inner);
                    let merged = Arc::new(published.merged(neos));
                    *published = Arc::clone(&merged);
                    info!(neos = count, bodies = merged.len(), "near earth objects loaded");
                    Ok(merged)
                }
                Err(err) => {
                    warn!(error = %err, "near earth object load failed, registry left untouched");
                    Err(Arc::new(err))
                }
            }
        }
        .boxed()
    }
}

impl std::fmt::Debug for NeoScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeoScenario")
            .field("name", &self.descriptor.name)
            .field("state", &self.state())
            .field("bodies", &self.bodies().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod scenario_test {
    use super::*;

    #[test]
    fn test_descriptor() {
        let config = NeoFeedConfig::default();
        let sun = BodyDescriptor::reference("sun", "Sun", 1.9891e30, 696_342.0, "#ffff00", None);
        let descriptor = ScenarioDescriptor::near_earth_objects(&config, vec![sun]);

        assert_eq!(descriptor.name, "NEO");
        assert_eq!(descriptor.title, "Near Earth Objects");
        assert_eq!(
            descriptor.seconds_per_tick,
            TickRate {
                min: 60,
                max: 18000,
                initial: 3600
            }
        );
        assert_eq!(descriptor.default_gui_settings.planet_scale, 1.0);
        assert!(descriptor.help.contains("next 10 passages closer than 0.05 AU"));
        assert_eq!(descriptor.common_bodies.len(), 1);
    }

    #[test]
    fn test_idle_scenario() {
        let sun = BodyDescriptor::reference("sun", "Sun", 1.9891e30, 696_342.0, "#ffff00", None);
        let scenario = NeoScenario::with_http(NeoFeedConfig::default(), vec![sun]);

        assert_eq!(scenario.state(), LoadState::Idle);
        assert_eq!(scenario.bodies().names().collect::<Vec<_>>(), vec!["sun"]);
    }
}
