pub mod use_quote_board;
