//! 类型定义模块

mod dns;
mod domain;

pub use dns::{NewRecord, RecordOverrides};
pub use domain::{DeletedDomain, DomainLookup};

// Re-export provider 库的公共类型
pub use conoha_dns_provider::{
    CreateDomainRequest, CreateRecordRequest, DeleteOutcome, Domain, Record, UpdateRecordRequest,
};
