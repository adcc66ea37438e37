//! Workspace-level integration tests for AlgoBench (see `tests/`).
