use anyhow::Result;
use clap::Args;
use log::debug;

use crate::{
    package::{self, PackageLayout, find_package_root},
    platform::{Platform, PlatformDetector},
    runtime::Runtime,
};

/// Configuration query flags.
///
/// The flags act as alternatives rather than a combination: when several
/// are given, the one earliest in the precedence order answers and the
/// rest are ignored.
#[derive(Args, Debug, Default, Clone)]
pub struct QueryFlags {
    /// Print the package version
    #[arg(long)]
    pub version: bool,

    /// Print the package install location
    #[arg(long)]
    pub package: bool,

    /// Print the include CFLAGS (-I...)
    #[arg(long)]
    pub cflags: bool,

    /// Print the directory containing flacarray.h
    #[arg(long)]
    pub include: bool,

    /// Print the linking LDFLAGS (-L...)
    #[arg(long)]
    pub ldflags: bool,

    /// Print the linking libraries (-lflacarray)
    #[arg(long)]
    pub libs: bool,

    /// Print the path to libflacarray
    #[arg(long)]
    pub lib: bool,
}

/// One configuration value a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Version,
    PackageRoot,
    IncludeDir,
    Cflags,
    Ldflags,
    Libs,
    LibPath,
}

impl QueryFlags {
    /// Pick the query to answer.
    ///
    /// Precedence is fixed: version, package, include, cflags, ldflags,
    /// libs, lib. Returns None when no flag was given.
    pub fn selected(&self) -> Option<Query> {
        let ordered = [
            (self.version, Query::Version),
            (self.package, Query::PackageRoot),
            (self.include, Query::IncludeDir),
            (self.cflags, Query::Cflags),
            (self.ldflags, Query::Ldflags),
            (self.libs, Query::Libs),
            (self.lib, Query::LibPath),
        ];

        ordered
            .into_iter()
            .find_map(|(given, query)| given.then_some(query))
    }
}

/// Resolved configuration, gathered once per invocation.
#[derive(Debug, Clone)]
pub struct Report {
    version: String,
    layout: PackageLayout,
    platform: Platform,
}

impl Report {
    /// Gather the configuration for the installed package.
    #[tracing::instrument(skip(runtime, detector))]
    pub fn new<R: Runtime, D: PlatformDetector>(runtime: &R, detector: &D) -> Result<Self> {
        let root = find_package_root(runtime)?;
        let platform = detector.detect();
        debug!(
            "Reporting for package root {} on {} (shared lib suffix {})",
            root.display(),
            platform.os,
            platform.shared_lib_suffix
        );

        Ok(Self {
            version: package::VERSION.to_string(),
            layout: PackageLayout::from_root(root),
            platform,
        })
    }

    /// Render the answer to one query as a single line, without a
    /// trailing newline.
    pub fn render(&self, query: Query) -> String {
        match query {
            Query::Version => self.version.clone(),
            Query::PackageRoot => self.layout.root().display().to_string(),
            Query::IncludeDir => self.layout.include_dir().display().to_string(),
            Query::Cflags => format!("-I{}", self.layout.include_dir().display()),
            Query::Ldflags => format!("-L{}", self.layout.lib_dir().display()),
            Query::Libs => format!("-l{}", package::LIB_NAME),
            Query::LibPath => self
                .layout
                .shared_lib(&self.platform.shared_lib_suffix)
                .display()
                .to_string(),
        }
    }
}

/// Answer the configuration query selected by the flags.
///
/// Returns None when no flag was given so the caller can print usage
/// instead. The package root is only discovered when a flag asked for
/// something.
#[tracing::instrument(skip(runtime, detector))]
pub fn report<R: Runtime, D: PlatformDetector>(
    runtime: &R,
    detector: &D,
    flags: &QueryFlags,
) -> Result<Option<String>> {
    let Some(query) = flags.selected() else {
        debug!("No query flag given");
        return Ok(None);
    };

    let report = Report::new(runtime, detector)?;
    Ok(Some(report.render(query)))
}
