pub mod asset;
pub mod symbol;

pub use asset::{AssetNode, AssetQuery, AssetScoreDetails, RankedAsset};
pub use symbol::{
    ProjectScanData, ScoredSymbol, SnapshotVersion, SymbolDefinition, SymbolKind,
};
