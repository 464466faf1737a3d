pub mod r#loop;
