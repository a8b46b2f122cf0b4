//! Structural checks keeping `tests/unit/` in step with `src/`
