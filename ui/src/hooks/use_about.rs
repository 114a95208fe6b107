use listing::resources::AboutPage;
use payloads::AboutUs;
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

/// Shows the built-in profile when the API cannot be reached.
#[hook]
pub fn use_about() -> ResourceHandle<AboutUs> {
    use_resource::<AboutPage>(())
}
