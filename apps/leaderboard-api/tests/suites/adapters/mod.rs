pub mod scores_sea;
