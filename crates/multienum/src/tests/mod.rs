//! End-to-end scenarios through the declaration macro.
