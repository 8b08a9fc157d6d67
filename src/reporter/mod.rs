pub mod html;
pub mod json;
pub mod pdf;

use crate::findings::Report;

pub trait Reporter {
    fn report(&self, report: &Report) -> String;
}
