pub mod journal_csv;
