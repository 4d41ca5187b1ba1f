//! Browser-environment helpers for the client.
//!
//! `storage` is the only module here: the key/value seam the session store
//! and the HTTP bearer header read from, backed by `localStorage` in the
//! browser and by memory in native tests.

pub mod storage;
