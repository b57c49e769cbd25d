//! Integration tests for the cart ledger
//!
//! Run with: cargo test -p lavkacore --test cart_test

use lavkacore::validation::{parse_quantity_change, parse_user_id};
use lavkacore::{Cart, CartError, EMPTY_CART_MESSAGE};

// ============================================================================
// Add / show
// ============================================================================

mod add_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_add_shows_single_line() {
        let cart = Cart::new();
        cart.add(42, "Кофе", 150).unwrap();

        assert_eq!(
            cart.show(42).unwrap(),
            "🛒 Ваша корзина:\n• Кофе - 1 шт. x 150 руб = 150 руб\n\n💰 Общая сумма: 150 руб"
        );
    }

    #[test]
    fn test_coffee_and_tea_scenario() {
        let cart = Cart::new();
        cart.add(1, "Coffee", 150).unwrap();
        cart.add(1, "Coffee", 999).unwrap();
        cart.add(1, "Tea", 100).unwrap();

        let text = cart.show(1).unwrap();
        assert!(text.contains("Coffee - 2 шт. x 150 руб = 300 руб"), "{}", text);
        assert!(text.contains("Tea - 1 шт. x 100 руб = 100 руб"), "{}", text);
        assert!(text.contains("💰 Общая сумма: 400 руб"), "{}", text);
        assert_eq!(cart.get_total_price(1).unwrap(), 400);

        cart.edit_quantity(1, "Tea", -1).unwrap();
        assert!(!cart.show(1).unwrap().contains("Tea"));
        assert_eq!(cart.get_total_price(1).unwrap(), 300);
    }

    #[test]
    fn test_users_are_isolated() {
        let cart = Cart::new();
        cart.add(1, "Кофе", 150).unwrap();
        cart.add(2, "Чай", 100).unwrap();

        assert_eq!(cart.get_total_price(1).unwrap(), 150);
        assert_eq!(cart.get_total_price(2).unwrap(), 100);
        cart.clear(1).unwrap();
        assert_eq!(cart.get_total_price(2).unwrap(), 100);
    }
}

// ============================================================================
// Remove / edit / clear
// ============================================================================

mod mutation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_remove_missing_is_noop() {
        let cart = Cart::new();
        cart.remove(1, "Кофе").unwrap();

        cart.add(1, "Чай", 100).unwrap();
        cart.remove(1, "Кофе").unwrap();
        cart.remove(1, "Чай").unwrap();
        cart.remove(1, "Чай").unwrap();

        assert_eq!(cart.show(1).unwrap(), EMPTY_CART_MESSAGE);
    }

    #[test]
    fn test_edit_quantity_below_one_removes_line() {
        let cart = Cart::new();
        cart.add(1, "Чай", 100).unwrap();
        cart.add(1, "Чай", 100).unwrap();
        cart.add(1, "Чай", 100).unwrap();

        cart.edit_quantity(1, "Чай", -3).unwrap();
        assert_eq!(cart.quantity(1, "Чай").unwrap(), None);
        assert_eq!(cart.show(1).unwrap(), EMPTY_CART_MESSAGE);
    }

    #[test]
    fn test_edit_quantity_increase() {
        let cart = Cart::new();
        cart.add(1, "Чай", 100).unwrap();
        cart.edit_quantity(1, "Чай", 4).unwrap();

        assert_eq!(cart.quantity(1, "Чай").unwrap(), Some(5));
        assert_eq!(cart.get_total_price(1).unwrap(), 500);
    }

    #[test]
    fn test_clear_then_show_is_empty() {
        let cart = Cart::new();
        cart.add(3, "Борщ", 250).unwrap();
        cart.add(3, "Морс", 120).unwrap();
        cart.clear(3).unwrap();

        assert_eq!(cart.show(3).unwrap(), EMPTY_CART_MESSAGE);
        assert_eq!(cart.get_total_price(3).unwrap(), 0);
    }

    #[test]
    fn test_unknown_user_views() {
        let cart = Cart::new();
        assert_eq!(cart.show(77).unwrap(), EMPTY_CART_MESSAGE);
        assert_eq!(cart.get_total_price(77).unwrap(), 0);
        assert!(cart.lines(77).unwrap().is_empty());
        assert!(cart.is_empty(77).unwrap());
    }
}

// ============================================================================
// Validation
// ============================================================================

mod validation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn is_invalid<T: std::fmt::Debug>(result: Result<T, CartError>) -> bool {
        matches!(result, Err(CartError::InvalidArgument(_)))
    }

    #[test]
    fn test_invalid_inputs_do_not_mutate() {
        let cart = Cart::new();
        cart.add(1, "Кофе", 150).unwrap();

        assert!(is_invalid(cart.add(0, "Кофе", 150)));
        assert!(is_invalid(cart.add(-1, "Кофе", 150)));
        assert!(is_invalid(cart.add(1, "", 150)));
        assert!(is_invalid(cart.add(1, "   ", 150)));
        assert!(is_invalid(cart.add(1, "Кофе", -1)));
        assert!(is_invalid(cart.remove(1, " ")));
        assert!(is_invalid(cart.edit_quantity(1, "", -1)));

        assert_eq!(cart.quantity(1, "Кофе").unwrap(), Some(1));
        assert_eq!(cart.get_total_price(1).unwrap(), 150);
    }

    #[test]
    fn test_non_integer_text_input_is_rejected() {
        assert!(is_invalid(parse_user_id("abc")));
        assert!(is_invalid(parse_user_id("1.0")));
        assert!(is_invalid(parse_quantity_change("два")));
        assert!(is_invalid(parse_quantity_change("0.5")));
    }

    #[test]
    fn test_error_message_is_descriptive() {
        let cart = Cart::new();
        let err = cart.add(1, "Кофе", -10).unwrap_err();
        assert_eq!(err.to_string(), "Цена товара должна быть неотрицательным целым числом.");
    }
}

// ============================================================================
// Concurrent access
// ============================================================================

mod concurrency_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_adds_for_new_user_are_not_lost() {
        let cart = Arc::new(Cart::new());
        let threads = 16;
        let adds_per_thread = 50;

        thread::scope(|scope| {
            for _ in 0..threads {
                let cart = Arc::clone(&cart);
                scope.spawn(move || {
                    for _ in 0..adds_per_thread {
                        cart.add(9, "Кофе", 150).unwrap();
                    }
                });
            }
        });

        let expected = (threads * adds_per_thread) as i64;
        assert_eq!(cart.quantity(9, "Кофе").unwrap(), Some(expected));
        assert_eq!(cart.get_total_price(9).unwrap(), expected * 150);
    }

    #[test]
    fn test_concurrent_first_adds_for_many_users() {
        let cart = Arc::new(Cart::new());

        thread::scope(|scope| {
            for user_id in 1..=32 {
                let cart = Arc::clone(&cart);
                scope.spawn(move || {
                    cart.add(user_id, "Чай", 100).unwrap();
                    cart.add(user_id, "Кофе", 150).unwrap();
                });
            }
        });

        assert_eq!(cart.user_count(), 32);
        for user_id in 1..=32 {
            assert_eq!(cart.product_names(user_id).unwrap(), vec!["Чай", "Кофе"]);
        }
    }

    #[test]
    fn test_checkout_during_adds_loses_nothing() {
        let cart = Arc::new(Cart::new());
        let adders = 8;
        let adds_per_thread = 200;

        let taken: i64 = thread::scope(|scope| {
            for _ in 0..adders {
                let cart = Arc::clone(&cart);
                scope.spawn(move || {
                    for _ in 0..adds_per_thread {
                        cart.add(4, "Чай", 100).unwrap();
                    }
                });
            }

            let checkout = scope.spawn(|| {
                let mut units = 0;
                for _ in 0..100 {
                    units += cart
                        .take(4)
                        .unwrap()
                        .iter()
                        .map(|line| line.quantity)
                        .sum::<i64>();
                    thread::yield_now();
                }
                units
            });
            checkout.join().unwrap()
        });

        let left = cart.quantity(4, "Чай").unwrap().unwrap_or(0);
        assert_eq!(taken + left, (adders * adds_per_thread) as i64);
    }
}
