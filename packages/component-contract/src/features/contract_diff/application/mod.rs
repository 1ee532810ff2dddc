pub mod diff_engine;
pub mod diff_usecase;

pub use diff_engine::ContractDiffer;
pub use diff_usecase::ContractDiffUseCase;
