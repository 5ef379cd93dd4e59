//! Winit host application.
//!
//! [`App`] is a builder that opens a window, mounts a [`Showcase`] on it and
//! drives it from winit's event loop:
//!
//! - window events are translated by [`input_adapter`] and dispatched,
//! - each `RedrawRequested` runs one showcase frame,
//! - redraws are requested only while the frame scheduler is active,
//! - closing the window tears the showcase down before the loop exits.
//!
//! ```rust,ignore
//! use vitrine::app::App;
//!
//! App::new()
//!     .with_title("Bookshop")
//!     .on_selection_change(|change, window| { /* update the panel */ })
//!     .run(catalog)?;
//! ```

pub mod input_adapter;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::catalog::Catalog;
use crate::errors::{Result, VitrineError};
use crate::interaction::SelectionChange;
use crate::renderer::WgpuSurface;
use crate::scene::camera::Viewport;
use crate::settings::ShowcaseSettings;
use crate::showcase::Showcase;
use crate::utils::{FpsCounter, Timer};

use self::input_adapter::{HostEvent, HostEventTranslator};

/// Called whenever the selection changes, with the showcase window.
pub type SelectionCallback = Box<dyn FnMut(&SelectionChange, &Window)>;

/// Application builder.
pub struct App {
    settings: ShowcaseSettings,
    on_selection: Option<SelectionCallback>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: ShowcaseSettings::default(),
            on_selection: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = title.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ShowcaseSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&SelectionChange, &Window) + 'static,
    {
        self.on_selection = Some(Box::new(callback));
        self
    }

    /// Opens the window and runs until it is closed.
    ///
    /// Blocks the calling thread. Returns the mount error if the showcase
    /// could not be created.
    pub fn run(self, catalog: Catalog) -> Result<()> {
        self.settings.validate()?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::new(catalog, self.settings, self.on_selection);
        event_loop.run_app(&mut runner)?;

        match runner.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

struct AppRunner {
    catalog: Catalog,
    settings: ShowcaseSettings,
    on_selection: Option<SelectionCallback>,

    window: Option<Arc<Window>>,
    showcase: Option<Showcase<WgpuSurface>>,
    translator: HostEventTranslator,

    timer: Timer,
    fps: FpsCounter,
    error: Option<VitrineError>,
}

impl AppRunner {
    fn new(catalog: Catalog, settings: ShowcaseSettings, on_selection: Option<SelectionCallback>) -> Self {
        Self {
            catalog,
            settings,
            on_selection,
            window: None,
            showcase: None,
            translator: HostEventTranslator::new(),
            timer: Timer::new(),
            fps: FpsCounter::new(),
            error: None,
        }
    }

    fn mount(&self, window: &Arc<Window>) -> Result<Showcase<WgpuSurface>> {
        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height);
        let render = self.settings.render.clone();
        let target = window.clone();

        Showcase::mount(&self.catalog, viewport, &self.settings, move |vp| {
            pollster::block_on(WgpuSurface::new(target, &render, vp.width, vp.height))
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: VitrineError) {
        log::error!("Fatal: {error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn notify_selection(&mut self) {
        let (Some(showcase), Some(window)) = (&mut self.showcase, &self.window) else {
            return;
        };
        if let Some(change) = showcase.take_selection_change()
            && let Some(callback) = self.on_selection.as_mut()
        {
            callback(&change, window);
        }
    }

    fn redraw(&mut self) {
        let Some(showcase) = self.showcase.as_mut() else {
            return;
        };

        self.timer.tick();
        if showcase.frame(self.timer.elapsed_ms()) {
            self.fps.update();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(mut showcase) = self.showcase.take() {
            showcase.teardown();
        }
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(&self.settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.settings.width),
                f64::from(self.settings.height),
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, VitrineError::SurfaceUnavailable(e.to_string()));
                return;
            }
        };
        self.window = Some(window.clone());

        log::info!("Initializing render surface...");
        match self.mount(&window) {
            Ok(showcase) => {
                self.showcase = Some(showcase);
                self.timer.reset();
                window.request_redraw();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            ref other => {
                let Some(host_event) = self.translator.translate(other) else {
                    return;
                };
                let Some(showcase) = self.showcase.as_mut() else {
                    return;
                };
                input_adapter::dispatch(showcase, host_event);
                if matches!(host_event, HostEvent::PointerClick { .. } | HostEvent::Dismiss) {
                    self.notify_selection();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let (Some(showcase), Some(window)) = (&self.showcase, &self.window)
            && showcase.is_active()
        {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
