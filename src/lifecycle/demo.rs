use crate::clients::{client_code, ClientError};
use crate::creators::{ConcreteCreator1, ConcreteCreator2};
use std::io::Write;
use tracing::info;

/// Runs the canonical two-block demonstration into `out`.
///
/// The driver is the only place that knows concrete creator types. It exists
/// outside the pattern's core contract: it exercises the core purely through
/// [`client_code`](crate::clients::client_code), once per creator variant.
///
/// # Transcript
///
/// ```text
/// App: Launched with the ConcreteCreator1.
/// Client: I'm not aware of the creator's class, but it still works.
/// Creator: The same creator's code has just worked with {Result of the ConcreteProduct1}
///
/// App: Launched with the ConcreteCreator2.
/// Client: I'm not aware of the creator's class, but it still works.
/// Creator: The same creator's code has just worked with {Result of the ConcreteProduct2}
/// ```
///
/// The second block ends without a trailing newline.
pub fn run_demo(out: &mut impl Write) -> Result<(), ClientError> {
    info!("launching demo with ConcreteCreator1");
    writeln!(out, "App: Launched with the ConcreteCreator1.")?;
    client_code(&ConcreteCreator1, out)?;

    // Terminate the first client block and leave one blank separator line.
    write!(out, "\n\n")?;

    info!("launching demo with ConcreteCreator2");
    writeln!(out, "App: Launched with the ConcreteCreator2.")?;
    client_code(&ConcreteCreator2, out)?;

    Ok(())
}
