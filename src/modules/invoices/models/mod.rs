mod booked_invoice;

pub use booked_invoice::{
    InvoiceDetail, InvoiceLine, InvoicePage, InvoiceSummary, Pagination, Recipient,
};
