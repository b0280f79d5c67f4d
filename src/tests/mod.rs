mod unit_sqlite_entries_database;
