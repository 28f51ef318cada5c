pub mod rate_record;
