use crate::{StringToAnyhow, HEIGHT, WIDTH};
use glam::Vec2;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::collections::HashSet;
use tilecast::draw::{self, DrawCommand};
use tilecast::{Button, Click, GridMap, Intents, Simulation, Viewport};

const FOV_STEP: f32 = 5.;
const RAY_STEP: isize = 10;

pub(crate) struct Game {
    sim: Simulation,
    viewport: Viewport,
    pointer: Option<Vec2>,
    pub canvas: Canvas<Window>,
}

fn sdl_color(color: draw::Color) -> Color {
    Color::RGB(color.r, color.g, color.b)
}

/// Snap a float rect outwards to whole pixels so neighbouring slabs touch.
fn sdl_rect(rect: draw::Rect) -> Rect {
    let x = rect.x.floor();
    let y = rect.y.floor();
    let w = (rect.x + rect.width).ceil() - x;
    let h = (rect.y + rect.height).ceil() - y;
    Rect::new(x as i32, y as i32, w.max(1.) as u32, h.max(1.) as u32)
}

impl Game {
    /// initialize game
    pub fn new(canvas: Canvas<Window>, map: GridMap) -> anyhow::Result<Self> {
        let viewport = Viewport::right_half(WIDTH as f32, HEIGHT as f32);
        let mut this = Self {
            sim: Simulation::with_map(map, &viewport)?,
            viewport,
            pointer: None,
            canvas,
        };
        this.update_title()?;

        Ok(this)
    }

    fn update_title(&mut self) -> anyhow::Result<()> {
        let config = self.sim.render_config();
        self.canvas.window_mut().set_title(&format!(
            "tilecast - fov {}° - {} rays",
            config.fov_degrees(),
            config.ray_count()
        ))?;

        Ok(())
    }

    /// handle key presses that act once per press
    pub fn key_once(&mut self, key: Keycode) -> anyhow::Result<()> {
        let config = self.sim.render_config();
        let next = match key {
            Keycode::LeftBracket => config.adjust_fov(-FOV_STEP),
            Keycode::RightBracket => config.adjust_fov(FOV_STEP),
            Keycode::Minus => config.adjust_ray_count(-RAY_STEP),
            Keycode::Equals => config.adjust_ray_count(RAY_STEP),
            _ => return Ok(()),
        };

        if next != config {
            self.sim.set_render_config(next);
            self.update_title()?;
        }

        Ok(())
    }

    /// sample held keys into this tick's intents and advance the simulation
    pub fn tick(&mut self, keys: &HashSet<Keycode>) {
        let intents = Intents {
            turn_left: keys.contains(&Keycode::A) || keys.contains(&Keycode::Left),
            turn_right: keys.contains(&Keycode::D) || keys.contains(&Keycode::Right),
            forward: keys.contains(&Keycode::W) || keys.contains(&Keycode::Up),
            backward: keys.contains(&Keycode::S) || keys.contains(&Keycode::Down),
        };
        self.sim.tick(&intents);
    }

    pub fn hover(&mut self, pointer: Option<(i32, i32)>) {
        self.pointer = pointer.map(|(x, y)| Vec2::new(x as f32, y as f32));
    }

    pub fn click(&mut self, x: i32, y: i32, button: MouseButton) {
        let button = match button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            _ => return,
        };
        self.sim.apply_click(&Click {
            pos: Vec2::new(x as f32, y as f32),
            button,
        });
    }

    /// draw one frame
    pub fn draw(&mut self) -> anyhow::Result<()> {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        let frame = self.sim.frame(&self.viewport, self.pointer);
        for command in frame.commands {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    self.canvas.set_draw_color(sdl_color(color));
                    self.canvas.fill_rect(sdl_rect(rect)).ah()?;
                }
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    self.canvas.set_draw_color(sdl_color(color));
                    // sdl has no line width, so stack parallel lines
                    let strokes = width.round().max(1.) as i32;
                    for offset in (0..strokes).map(|i| i - strokes / 2) {
                        self.canvas
                            .draw_line(
                                Point::new(from.x as i32, from.y as i32 + offset),
                                Point::new(to.x as i32, to.y as i32 + offset),
                            )
                            .ah()?;
                    }
                }
            }
        }

        Ok(())
    }
}
