//! Shared helpers for command tests.

use globalretailx::fixtures::{BUNDLED_FIXTURES, Fixture, FixtureError};

/// The bundled `marketplace` fixture set.
pub(crate) fn marketplace() -> Result<Fixture<'static>, FixtureError> {
    let mut fixture = Fixture::with_base_path(BUNDLED_FIXTURES);

    fixture.load_set("marketplace")?;

    Ok(fixture)
}
