pub mod enrichment;
pub mod institution;
pub mod micr;
