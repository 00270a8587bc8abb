//! The client side of the recipe: code that works with creators through the
//! abstraction only.

pub mod error;

pub use error::*;

use crate::framework::Creator;
use std::io::Write;
use tracing::debug;

/// Runs the client routine against any creator.
///
/// # Architecture Note
/// The client works with an instance of a concrete creator, but only through
/// the base [`Creator`] capability. As long as the caller keeps talking to the
/// abstraction, any creator variant can be passed in here, including ones that
/// do not exist yet. Nothing in this function (or in its signature) names a
/// concrete creator or product type; that is the property under test, not just
/// a behavior.
///
/// # Output
/// Writes the fixed client line followed by the creator's
/// [`some_operation`](Creator::some_operation) result, with no trailing
/// newline. The demo driver owns block separation.
pub fn client_code(creator: &dyn Creator, out: &mut impl Write) -> Result<(), ClientError> {
    debug!("dispatching through the Creator abstraction");
    write!(
        out,
        "Client: I'm not aware of the creator's class, but it still works.\n{}",
        creator.some_operation()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::RecordingCreator;

    fn run_client(creator: &dyn Creator) -> String {
        let mut out = Vec::new();
        client_code(creator, &mut out).expect("write to Vec cannot fail");
        String::from_utf8(out).expect("client output is UTF-8")
    }

    #[test]
    fn output_is_the_client_line_plus_some_operation() {
        let creator = RecordingCreator::new("{scripted}");
        let expected = format!(
            "Client: I'm not aware of the creator's class, but it still works.\n{}",
            creator.some_operation()
        );
        assert_eq!(run_client(&creator), expected);
    }

    #[test]
    fn output_has_no_trailing_newline() {
        let creator = RecordingCreator::new("x");
        assert!(!run_client(&creator).ends_with('\n'));
    }

    #[test]
    fn template_is_identical_across_creators() {
        let one = run_client(&RecordingCreator::new("one"));
        let two = run_client(&RecordingCreator::new("two"));

        let template_one = one.strip_suffix("one").expect("suffix");
        let template_two = two.strip_suffix("two").expect("suffix");
        assert_eq!(template_one, template_two);
    }

    #[test]
    fn write_errors_propagate() {
        struct FailingSink;

        impl std::io::Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let creator = RecordingCreator::new("x");
        let result = client_code(&creator, &mut FailingSink);
        assert!(matches!(result, Err(ClientError::Output(_))));
    }
}
