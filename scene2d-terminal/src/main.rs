/// Scene2D Terminal Demo - Captioned Square and Triangle
///
/// Demonstrates the character-cell renderer with two styled objects.
/// Controls:
///   - Arrow Keys: Move
///   - A/D: Rotate
///   - W/S: Zoom
///   - Q/ESC: Quit

use nalgebra::DMatrix;
use scene2d_core::{Color, Object2d, SceneError, Style};
use scene2d_terminal::SceneApp;
use std::io;

fn main() -> io::Result<()> {
    println!("Scene2D Terminal Renderer - Loading...");

    let square = Object2d::square(
        2.0,
        Style::builder()
            .segments(1.0, Color::CYAN)
            .points(1.0, Color::YELLOW)
            .captions("monospace", Color::WHITE)
            .texts(&["a", "b", "c", "d"])
            .build()
            .map_err(invalid_input)?,
    );

    let triangle = Object2d::new(
        DMatrix::from_row_slice(
            3,
            3,
            &[
                -2.5, -1.0, 1.0, //
                -0.5, -1.0, 1.0, //
                -1.5, 1.0, 1.0,
            ],
        ),
        DMatrix::from_row_slice(3, 2, &[0, 1, 1, 2, 2, 0]),
        Style::builder()
            .segments(1.0, Color::GREEN)
            .points(1.0, Color::RED)
            .captions("monospace", Color::WHITE)
            .build()
            .map_err(invalid_input)?,
    )
    .map_err(invalid_input)?;

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = SceneApp::new(vec![square, triangle])?;
    app.run()?;

    println!("Thank you for using the Scene2D Terminal Renderer!");
    Ok(())
}

fn invalid_input(e: SceneError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
}
