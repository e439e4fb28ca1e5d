//! Internal tests, laid out like the module tree.
