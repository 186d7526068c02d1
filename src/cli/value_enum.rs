use clap::ValueEnum;
use list_tidy_domain::{CaseConversion, SortDirection};

use crate::output::OutputFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCaseConversion {
    None,
    Uppercase,
    Lowercase,
    Titlecase,
    Camelcase,
    Snakecase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliSortDirection {
    #[value(alias = "ascending")]
    Asc,
    #[value(alias = "descending")]
    Desc,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// Processed lines only
    #[default]
    Text,
    /// Full result record as JSON
    Json,
    /// Full result record as YAML
    Yaml,
    /// Processed lines followed by a statistics table
    Table,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($src:ident => $dst:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$src => <$to>::$dst, )+
                }
            }
        }
    };
}

map_enum!(
    CliCaseConversion,
    CaseConversion,
    None => None,
    Uppercase => Uppercase,
    Lowercase => Lowercase,
    Titlecase => Titlecase,
    Camelcase => Camelcase,
    Snakecase => Snakecase,
);
map_enum!(
    CliSortDirection,
    SortDirection,
    Asc => Ascending,
    Desc => Descending,
    None => None,
);
map_enum!(
    CliOutputFormat,
    OutputFormat,
    Text => Text,
    Json => Json,
    Yaml => Yaml,
    Table => Table,
);
