pub mod date_window;
pub mod sale_record;
pub mod sales_page;

pub use date_window::{DateWindow, DATE_FORMAT};
pub use sale_record::{
    PaymentDetail, PaymentMethod, RawSaleRecord, RecordCode, COMPOSITE_DESCRIPTION,
    NOT_INFORMED_DESCRIPTION,
};
pub use sales_page::SalesPage;
