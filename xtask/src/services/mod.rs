pub mod tailwind;
