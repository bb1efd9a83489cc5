/// Example: Load and render a shape file in the terminal
///
/// Usage: cargo run --example load_shape -- path/to/file.shape

use scene2d_core::{shape, Color, Object2d, Style};
use scene2d_terminal::SceneApp;
use std::env;
use std::fs;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let style = Style::builder()
        .segments(1.0, Color::CYAN)
        .points(1.0, Color::YELLOW)
        .captions("monospace", Color::WHITE)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    if args.len() < 2 {
        eprintln!("Usage: {} <shape-file>", args[0]);
        eprintln!("\nNo shape file provided, using default square...");
        // Use default square
        let square = Object2d::square(2.0, style);
        let mut app = SceneApp::new(vec![square])?;
        return app.run();
    }

    let shape_path = &args[1];

    println!("Loading shape file: {}", shape_path);

    // Read and parse the shape description
    let text = fs::read_to_string(shape_path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read shape file: {}", e),
        )
    })?;

    let data = shape::parse_shape(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    println!(
        "Loaded '{}': {} vertices, {} edges",
        data.name,
        data.vertices.nrows(),
        data.edges.nrows()
    );

    let object = Object2d::new(data.vertices, data.edges, style)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = SceneApp::new(vec![object])?;
    app.run()?;

    println!("Thank you for using the Scene2D Terminal Renderer!");
    Ok(())
}
