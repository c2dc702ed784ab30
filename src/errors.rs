// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let `?` work for our `Error`.
// ResultExt adds the `chain_err` trait method.
use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        ImageFailure(::image::ImageError);
    }

    errors {
        InvalidDimension(width: isize, height: isize) {
            description("maze dimensions have to be > 0")
            display("maze dimensions have to be > 0, got width {} height {}", width, height)
        }

        InvalidCoordinate(x: isize, y: isize) {
            description("coordinate is outside of the grid")
            display("coordinate ({}, {}) is outside of the grid", x, y)
        }

        NotAdjacent(a: (isize, isize), b: (isize, isize)) {
            description("tiles are not grid neighbours")
            display("tiles {:?} and {:?} are not grid neighbours", a, b)
        }

        AlreadyGenerated(name: String) {
            description("maze is already generated")
            display("maze '{}' is already generated", name)
        }

        InvalidWeight(first: u32, last: u32) {
            description("growing tree weights have to be within 0..=100 with last <= first")
            display("invalid growing tree weights first {} last {}: both have to be within 0..=100 \
                     and last <= first", first, last)
        }

        NotGenerated(name: String) {
            description("there is no maze yet")
            display("there is no maze yet, '{}' has not been generated", name)
        }

        InvalidPixelSize(pixels: u32) {
            description("tile pixel size has to be > 0")
            display("tile pixel size has to be > 0, got {}", pixels)
        }

        ImageTooLarge(width: usize, height: usize, pixels: u32) {
            description("maze image dimensions do not fit in u32 pixels")
            display("a {}x{} maze with {} pixel tiles is too large to render", width, height, pixels)
        }
    }
}
