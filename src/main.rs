use std::sync::Arc;

use blue_marble::{config::Config, error::RenderError, state::State};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

#[derive(Default)]
struct App {
    config: Config,
    state: Option<State>,
    error: Option<RenderError>,
}

impl App {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RenderError> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let state = pollster::block_on(State::new(window.clone(), &self.config))?;
        self.state = Some(state);

        window.request_redraw();
        Ok(())
    }
}

fn set_look_mode(window: &Window, enabled: bool) {
    log::debug!("look mode {}", if enabled { "on" } else { "off" });

    let grab = if enabled {
        window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
    } else {
        window.set_cursor_grab(CursorGrabMode::None)
    };
    if let Err(err) = grab {
        log::warn!("cursor grab unavailable: {err}");
    }
    window.set_cursor_visible(!enabled);
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            log::error!("{err}");
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                log::info!("The close button was pressed; stopping");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                state.render();
                state.get_window().request_redraw();
            }
            WindowEvent::Resized(size) => {
                state.resize(size);
            }
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                if let Some(enabled) = state.input.on_mouse_button(button, button_state) {
                    set_look_mode(state.get_window(), enabled);
                }
            }
            WindowEvent::Focused(false) => {
                if state.input.on_focus_lost() {
                    set_look_mode(state.get_window(), false);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                state.input.on_key(key, key_state);
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let (Some(state), DeviceEvent::MouseMotion { delta }) = (self.state.as_mut(), event) {
            state.input.on_mouse_motion(delta);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.error.take() {
        return Err(err.into());
    }
    Ok(())
}
