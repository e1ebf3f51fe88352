//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges Winit (OS-level events) with the game's core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ├─ Converts Winit      │    │  ↓               │
//  │   ├─ Tracks modifiers    │    │  Game            │
//  │   └─ Pixels → scene %    │    │                  │
//  │   ↓                      │    │                  │
//  │  InputBuffer             │    │                  │
//  │   ↓                      │    │                  │
//  │  RedrawRequested         │    │                  │
//  │   ↓ (flush)              │    │                  │
//  │  PlatformEvent ──────────┼───►│                  │
//  │  Window caption ◄────────┼────┤  CoreEvent::View │
//  └──────────────────────────┘    └──────────────────┘
// ```
//
// Frame Boundary: RedrawRequested
//   → All buffered input sent atomically (empty buffers are not sent)
//   → Latest scene view applied to the window caption
//
// If the core thread dies the platform logs and keeps running so the
// window can still be closed. Winit requires the main thread on macOS/iOS,
// so this runs on the thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use crate::config::WindowConfig;
use crate::core::input::event::InputEvent;
use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use crate::game::SceneView;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Not Send/Sync; it must remain on the main thread. The window is created
/// lazily in `resumed()`.
pub(crate) struct Platform {
    config: WindowConfig,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers discrete/continuous input until frame boundary.
    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
    view_receiver: Receiver<CoreEvent>,

    input_processor: InputProcessor,

    /// Caption currently applied to the window.
    caption: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        config: WindowConfig,
        event_sender: Sender<PlatformEvent>,
        view_receiver: Receiver<CoreEvent>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            caption: config.title.clone(),
            config,
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            view_receiver,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core thread. Dropped with a warning if
    /// the core is gone.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Takes the newest scene view, if the core sent any since last frame.
    fn latest_view(&self) -> Option<SceneView> {
        self.view_receiver
            .try_iter()
            .last()
            .map(|CoreEvent::View(view)| view)
    }

    /// Updates the caption from the newest view. Returns `true` if it changed.
    fn apply_latest_view(&mut self) -> bool {
        let Some(view) = self.latest_view() else {
            return false;
        };

        let caption = window_caption(&self.config.title, &view);
        if caption == self.caption {
            return false;
        }

        if let Some(window) = &self.window {
            window.set_title(&caption);
        }
        self.caption = caption;
        true
    }

    fn buffer_pointer(&mut self, event: Option<InputEvent>) {
        match event {
            Some(event) => self.buffer.push_continuous(event),
            None => trace!(target: "platform::input", "Pointer ignored, window has no area"),
        }
    }
}

/// `"<title> | <caption>"`, or just the title when there is nothing to show.
fn window_caption(title: &str, view: &SceneView) -> String {
    let caption = view.caption();
    if caption.is_empty() {
        title.to_string()
    } else {
        format!("{} | {}", title, caption)
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.caption.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let Some(size) = self.window.as_ref().map(Window::inner_size) else {
                    return;
                };
                let event = self.input_processor.process_pointer_move(*position, size);
                self.buffer_pointer(event);
            }

            WindowEvent::CursorLeft { .. } => {
                self.buffer.push_discrete(InputEvent::PointerLeft);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary
                self.flush_input_buffer();
                self.apply_latest_view();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
