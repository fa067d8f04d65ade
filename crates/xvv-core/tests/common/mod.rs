pub mod xva_builder;
