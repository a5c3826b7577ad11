/// Use cases module containing application business logic orchestration
mod scan_inventory;

pub use scan_inventory::ScanInventoryUseCase;
