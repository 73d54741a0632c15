use anyhow::Context;
use game::Game;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tilecast::GridMap;

mod game;

// helper trait to convert strings into std::error types
trait StringToAnyhow<T> {
    fn ah(self) -> anyhow::Result<T>;
}

impl<T> StringToAnyhow<T> for Result<T, String> {
    fn ah(self) -> anyhow::Result<T> {
        self.map_err(|err| anyhow::anyhow!("{err}"))
    }
}

// dimensions of screen
const WIDTH: usize = 1024;
const HEIGHT: usize = 512;

const TARGET_FPS: u64 = 60;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("TILECAST_LOG");

    let map = match std::env::args().nth(1) {
        Some(path) => GridMap::load(&path).with_context(|| format!("could not load map {path}"))?,
        None => {
            log::info!("no map given, using the built-in layout");
            GridMap::default()
        }
    };

    // sdl boilerplate
    log::info!("initializing sdl2");
    let sdl_ctx = sdl2::init().ah()?;
    log::info!("initializing video");
    let video = sdl_ctx.video().ah()?;

    log::info!("initializing window");
    let mut window = video
        .window("tilecast", WIDTH as u32, HEIGHT as u32)
        .position_centered()
        .build()?;
    window.set_resizable(false);
    log::info!("creating canvas");
    let canvas = window.into_canvas().build()?;
    log::info!("pumping events");
    let mut events = sdl_ctx.event_pump().ah()?;

    let mut keys = HashSet::new();

    log::info!("initializing game state");
    let mut game = Game::new(canvas, map)?;

    let delta = Duration::from_millis(1_000 / TARGET_FPS);

    'main_loop: loop {
        let prev = Instant::now();

        // handle events
        for ev in events.poll_iter() {
            match ev {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'main_loop,
                Event::KeyDown {
                    keycode: Some(k),
                    repeat,
                    ..
                } => {
                    keys.insert(k);
                    if !repeat {
                        game.key_once(k)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(k), ..
                } => {
                    keys.remove(&k);
                }
                Event::MouseMotion { x, y, .. } => game.hover(Some((x, y))),
                Event::MouseButtonUp {
                    mouse_btn, x, y, ..
                } => game.click(x, y, mouse_btn),
                Event::Window {
                    win_event: WindowEvent::Leave,
                    ..
                } => game.hover(None),
                _ => {}
            }
        }

        game.tick(&keys);

        if let Err(err) = game.draw() {
            log::error!("error while drawing: {err}");
            Err(err)?;
        }
        game.canvas.present();

        let diff = Instant::now() - prev;
        if diff < delta {
            std::thread::sleep(delta - diff);
        }
    }

    Ok(())
}
