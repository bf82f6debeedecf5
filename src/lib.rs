#![doc = r#"
notestitch — stitch a directory of note pages into one tall image or PDF.

This crate loads every image with a given extension from one directory, pads each
page to the widest page by centering it on white, and stacks the pages top to
bottom into a single RGB canvas. The canvas can be kept in memory or written as a
single-page PDF, a JPEG, or any other format the `image` crate can encode. It powers
the `notestitch` CLI and can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
notestitch = "0.1"
```

Quick start: stitch a directory to a file
-----------------------------------------
```rust,no_run
use std::path::Path;
use notestitch::{stitch_directory_to_path, ImageOrder, StitchParams};

fn main() -> notestitch::Result<()> {
    let params = StitchParams {
        extension: "png".to_string(),
        output: "stitched.pdf".into(),
        order: ImageOrder::Name,
    };

    let written = stitch_directory_to_path(Path::new("/scans/lecture-03"), &params)?;
    println!("wrote {}", written.display());
    Ok(())
}
```

Stitch in memory to `StitchedImage`
-----------------------------------
```rust,no_run
use std::path::Path;
use notestitch::{stitch_directory, StitchParams};

fn main() -> notestitch::Result<()> {
    let stitched = stitch_directory(Path::new("/scans/lecture-03"), &StitchParams::default())?;

    // `canvas` is an `image::RgbImage`; the report says where every page landed.
    for placement in &stitched.report.placements {
        println!("{} at y={}", placement.name, placement.y);
    }
    println!("{}x{}", stitched.canvas.width(), stitched.canvas.height());
    Ok(())
}
```

Lower-level building blocks
---------------------------
```rust
use image::{DynamicImage, RgbImage, Rgb};
use notestitch::{max_dimensions, pad_to_width, stitch_images};

let pages = vec![
    DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 50, Rgb([0, 0, 0]))),
    DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 80, Rgb([0, 0, 0]))),
];
let (max_width, _) = max_dimensions(&pages);
let padded: Vec<_> = pages.iter().map(|page| pad_to_width(page, max_width)).collect();
let canvas = stitch_images(&padded, max_width, 130);
assert_eq!(canvas.dimensions(), (200, 130));
```

Error handling
--------------
All public functions return `notestitch::Result<T>`; match on `notestitch::Error` to
handle specific cases. Every error aborts the whole run: nothing is skipped and no
partial output is written.

```rust,no_run
use std::path::Path;
use notestitch::{stitch_directory_to_path, Error, StitchParams};

fn main() {
    match stitch_directory_to_path(Path::new("/missing"), &StitchParams::default()) {
        Ok(path) => println!("wrote {}", path.display()),
        Err(Error::FileSystem { path, .. }) => eprintln!("cannot list {}", path.display()),
        Err(Error::Decode { path, .. }) => eprintln!("bad image {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — `ImageOrder` and `OutputFormat`.
- [`io`] — the directory loader and the JPEG/PDF writers.
- [`core`] — stitch parameters, padding, compositing and saving.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::StitchParams;
pub use error::{Error, Result};
pub use types::{ImageOrder, OutputFormat};

// Loader
pub use io::loader::{ImageSet, LoadedImage};

// Building blocks
pub use crate::core::processing::padding::{pad_all, pad_to_width};
pub use crate::core::processing::save::save_stitched_image;
pub use crate::core::processing::stitch::{Placement, Stitcher, max_dimensions, stitch_images};

// High-level API re-exports
pub use api::{
    StitchReport, StitchedImage, stitch_directory, stitch_directory_to_path, stitch_image_set,
};
