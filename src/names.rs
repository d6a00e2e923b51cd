use crate::core::traits::NameSource;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;

/// Name source backed by the `fake` crate's EN locale data.
pub struct FakerNames;

impl NameSource for FakerNames {
    fn full_name(&mut self) -> String {
        Name(EN).fake()
    }
}
