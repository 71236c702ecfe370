//! The event loop: opens the native window and repaints the scene.

use std::sync::Arc;

use futures::executor::block_on;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::canvas::Painter;
use crate::error::Error;
use crate::renderer::Renderer;
use crate::window::Window;

struct Active {
    window: Arc<winit::window::Window>,
    renderer: Renderer,
}

struct App {
    scene: Window,
    active: Option<Active>,
    failure: Option<Error>,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        tracing::error!("{error}");
        self.failure = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(active) = &mut self.active else {
            return;
        };

        let mut painter = Painter::new(active.renderer.logical_size());
        self.scene.draw_shapes(&mut painter);

        match active.renderer.render(painter.into_frame()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = active.renderer.size();
                active.renderer.resize(size);
                active.window.request_redraw();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(
                    event_loop,
                    Error::GraphicsInit("surface out of memory".to_owned()),
                );
            }
            Err(e) => tracing::warn!("skipping frame: {e:?}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.active.is_some() {
            return;
        }

        let (width, height) = self.scene.size();
        let origin = self.scene.origin();
        let attributes = winit::window::Window::default_attributes()
            .with_title(self.scene.label())
            .with_inner_size(LogicalSize::new(width, height))
            .with_position(LogicalPosition::new(origin.x, origin.y));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let inner = window.inner_size();
        let physical_size = (inner.width.max(1), inner.height.max(1));
        match block_on(Renderer::new(
            window.clone(),
            physical_size,
            window.scale_factor(),
            self.scene.background(),
        )) {
            Ok(renderer) => {
                window.request_redraw();
                self.active = Some(Active { window, renderer });
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(active) = &mut self.active else {
            return;
        };
        if active.window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                active.renderer.resize((size.width, size.height));
                active.window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                active.renderer.change_scale_factor(scale_factor);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Opens the window and draws its shapes until the user closes it.
///
/// This blocks the calling thread for the lifetime of the window, like any
/// GUI main loop.
///
/// # Examples
///
/// ```no_run
/// use trazo::{Circle, Point, Window};
///
/// let mut window = Window::new(Point::new(100.0, 100.0), 800, 600, "circle");
/// window.attach(Circle::new(Point::new(400.0, 300.0), 120.0));
/// trazo::run(window)?;
/// # Ok::<(), trazo::Error>(())
/// ```
pub fn run(window: Window) -> Result<(), Error> {
    let event_loop = EventLoop::new()?;
    // Scenes are static between OS events; no need to spin.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        scene: window,
        active: None,
        failure: None,
    };
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
