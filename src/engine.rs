//=========================================================================
// Engine
//=========================================================================
//
// Main entry point: wires the game, the logic thread and the window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_config()              blocks until exit
//         ├─ with_save_store()
//         └─ with_audio_sink()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::audio::{AudioSink, LogAudioSink};
use crate::config::{GameConfig, WindowConfig};
use crate::core::CoreSystemsOrchestrator;
use crate::game::Game;
use crate::persistence::{FileStore, SaveStore};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Config**: [`GameConfig::default`]
/// - **Save store**: [`FileStore`] in the configured save directory
/// - **Audio sink**: [`LogAudioSink`]
///
/// # Examples
///
/// ```no_run
/// use hollywood_mystery::EngineBuilder;
/// use hollywood_mystery::config::GameConfig;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_config(GameConfig::default().with_save_dir("/tmp/hmm"))
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    store: Option<Box<dyn SaveStore>>,
    sink: Option<Box<dyn AudioSink>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            store: None,
            sink: None,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the file-backed save store.
    pub fn with_save_store(mut self, store: Box<dyn SaveStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the logging audio sink.
    pub fn with_audio_sink(mut self, sink: Box<dyn AudioSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds the engine and the game it will run.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, saves: {})",
            self.tps,
            self.channel_capacity,
            self.config.save_dir.display()
        );

        let store = self
            .store
            .unwrap_or_else(|| Box::new(FileStore::new(self.config.save_dir.clone())));
        let sink = self.sink.unwrap_or_else(|| Box::new(LogAudioSink));

        Engine {
            game: Game::new(self.config.timings, store, sink),
            window: self.config.window,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, Game
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: PlatformEvent (bounded) / CoreEvent (unbounded)
/// ```
pub struct Engine {
    game: Game,
    window: WindowConfig,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the channels in both directions
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close the logic thread sees `WindowClosed` and exits
    ///
    /// A logic-thread panic is logged; the window stays usable until closed.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx) = bounded(self.channel_capacity);
        // Views are only sent on change; unbounded so a stalled window
        // never blocks the logic thread
        let (view_tx, view_rx) = unbounded();

        //--- 2. Spawn the core logic thread -------------------------------
        let orchestrator = CoreSystemsOrchestrator::new(self.game, event_rx, view_tx);
        let core_handle = orchestrator.spawn_core_thread(self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.window, event_tx, view_rx);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup ---------------------------------------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
