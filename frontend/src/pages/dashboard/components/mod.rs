pub mod balance_card;
