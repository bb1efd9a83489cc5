/// Terminal front-end for the 2D scene renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use scene2d_core::{Object2d, Point, Pose, Scene2d};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod surface;

pub use surface::TermSurface;

/// Main application struct for terminal 2D rendering
pub struct SceneApp {
    scene: Scene2d<TermSurface>,
    base: Vec<Object2d>,
    pose: Pose,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl SceneApp {
    pub fn new(objects: Vec<Object2d>) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let surface = TermSurface::new(width as usize, height as usize);
        let center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
        // Magnification from world units to cells, sized so a handful of
        // units fills the screen height.
        let scale = (height as f64 / 6.0).max(1.0);

        let scene = Scene2d::new(surface, center, scale)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self {
            scene,
            base: objects,
            pose: Pose::identity(),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Up => {
                    self.pose.translate(0.0, 0.5);
                }
                KeyCode::Down => {
                    self.pose.translate(0.0, -0.5);
                }
                KeyCode::Left => {
                    self.pose.translate(-0.5, 0.0);
                }
                KeyCode::Right => {
                    self.pose.translate(0.5, 0.0);
                }
                KeyCode::Char('a') => {
                    self.pose.rotate(5.0);
                }
                KeyCode::Char('d') => {
                    self.pose.rotate(-5.0);
                }
                KeyCode::Char('w') => {
                    self.pose.zoom_by(1.1);
                }
                KeyCode::Char('s') => {
                    self.pose.zoom_by(1.0 / 1.1);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        self.pose.rotate(0.8);
    }

    fn render(&mut self) -> io::Result<()> {
        let model = self.pose.to_transform();

        // Restage the scene from transformed copies of the base objects
        self.scene.clear_objects(None);
        for obj in &self.base {
            let mut staged = obj.clone();
            staged.apply_transformation(&model);
            self.scene.add_object(staged);
        }

        self.scene.draw();

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.scene.surface().present(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(TermColor::Yellow),
            Print(format!(
                "Scene2D Terminal Renderer | FPS: {:.1} | Controls: Arrows=Move A/D=Rotate W/S=Zoom Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
