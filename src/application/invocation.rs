//! # Tool Invocation
//!
//! The closed set of supported trestle commands. Each variant carries its
//! normalized parameter object and dispatches to that command's builder and
//! formatter.

use crate::domain::types::ExecutionResult;
use crate::interface::commands::catalog_generate::{self, CatalogGenerateParams};
use crate::interface::commands::import::{self, ImportParams};
use crate::interface::commands::init::{self, InitParams};
use crate::interface::commands::profile_assemble::{self, ProfileAssembleParams};
use crate::interface::commands::profile_generate::{self, ProfileGenerateParams};
use crate::interface::commands::profile_resolve::{self, ProfileResolveParams};

#[derive(Debug, Clone, PartialEq)]
pub enum ToolInvocation {
    Init(InitParams),
    Import(ImportParams),
    CatalogGenerate(CatalogGenerateParams),
    ProfileGenerate(ProfileGenerateParams),
    ProfileResolve(ProfileResolveParams),
    ProfileAssemble(ProfileAssembleParams),
}

impl ToolInvocation {
    pub fn init(params: InitParams) -> Self {
        Self::Init(params.normalize())
    }

    pub fn import(params: ImportParams) -> Self {
        Self::Import(params.normalize())
    }

    pub fn catalog_generate(params: CatalogGenerateParams) -> Self {
        Self::CatalogGenerate(params.normalize())
    }

    /// Values are passed through as given; this command does not strip whitespace.
    pub fn profile_generate(params: ProfileGenerateParams) -> Self {
        Self::ProfileGenerate(params)
    }

    pub fn profile_resolve(params: ProfileResolveParams) -> Self {
        Self::ProfileResolve(params.normalize())
    }

    pub fn profile_assemble(params: ProfileAssembleParams) -> Self {
        Self::ProfileAssemble(params.normalize())
    }

    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Init(_) => init::TOOL_NAME,
            Self::Import(_) => import::TOOL_NAME,
            Self::CatalogGenerate(_) => catalog_generate::TOOL_NAME,
            Self::ProfileGenerate(_) => profile_generate::TOOL_NAME,
            Self::ProfileResolve(_) => profile_resolve::TOOL_NAME,
            Self::ProfileAssemble(_) => profile_assemble::TOOL_NAME,
        }
    }

    pub fn build_args(&self) -> Vec<String> {
        match self {
            Self::Init(p) => p.build_args(),
            Self::Import(p) => p.build_args(),
            Self::CatalogGenerate(p) => p.build_args(),
            Self::ProfileGenerate(p) => p.build_args(),
            Self::ProfileResolve(p) => p.build_args(),
            Self::ProfileAssemble(p) => p.build_args(),
        }
    }

    pub fn format_result(&self, result: &ExecutionResult) -> String {
        match self {
            Self::Init(p) => p.format_result(result),
            Self::Import(p) => p.format_result(result),
            Self::CatalogGenerate(p) => p.format_result(result),
            Self::ProfileGenerate(p) => p.format_result(result),
            Self::ProfileResolve(p) => p.format_result(result),
            Self::ProfileAssemble(p) => p.format_result(result),
        }
    }
}
