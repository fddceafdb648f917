pub mod assessment;
pub mod behavioral;
pub mod record;
