use clap::{Parser, Subcommand};
use gallery_core::DEFAULT_GALLERY_DIR;
use gallery_files::{GalleryStore, StoreOptions};
use gallery_types::{image_filename, ImageDetails, UploadedPhoto};
use std::io::Write;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Remote gallery CLI")]
struct Cli {
    /// Gallery directory
    #[arg(long, env = "GALLERY_DIR", default_value = DEFAULT_GALLERY_DIR)]
    dir: PathBuf,

    /// Reject filenames that could leave the gallery directory
    #[arg(long)]
    strict_filenames: bool,

    /// Write uploads through a temporary file
    #[arg(long)]
    atomic_writes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all images
    List,
    /// Read an image
    Read {
        /// Image name without extension
        name: String,
        /// Image extension
        extension: String,
        /// Write the image here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Upload a local file under its own filename
    Upload {
        /// Path of the file to upload
        path: PathBuf,
    },
    /// Delete an image
    Delete {
        /// Image name without extension
        name: String,
        /// Image extension
        extension: String,
    },
}

fn print_images(images: &[ImageDetails]) {
    if images.is_empty() {
        println!("No images found.");
    } else {
        for image in images {
            println!("{}", image.name);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = GalleryStore::with_options(
        cli.dir,
        StoreOptions {
            strict_filenames: cli.strict_filenames,
            atomic_writes: cli.atomic_writes,
        },
    );

    match cli.command {
        Commands::List => {
            let images = store
                .list()
                .map_err(|e| format!("Failed to list images: {}", e))?;
            print_images(&images);
        }
        Commands::Read {
            name,
            extension,
            output,
        } => {
            let content = store
                .read(&image_filename(&name, &extension))
                .map_err(|e| format!("Failed to read image: {}", e))?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &content)?;
                    println!("Wrote {} bytes to {}", content.len(), path.display());
                }
                None => std::io::stdout().write_all(&content)?,
            }
        }
        Commands::Upload { path } => {
            let original_filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| format!("not a file path: {}", path.display()))?;
            let content = std::fs::read(&path)?;

            let details = store
                .write(&UploadedPhoto::new(original_filename, content))
                .map_err(|e| format!("Failed to upload image: {}", e))?;
            println!("Uploaded {}", details.name);
        }
        Commands::Delete { name, extension } => {
            let remaining = store
                .delete(&image_filename(&name, &extension))
                .map_err(|e| format!("Failed to delete image: {}", e))?;
            print_images(&remaining);
        }
    }

    Ok(())
}
