use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordStrengthBarProps {
    pub password: String,
}

/// One point each for length >= 8, a lowercase letter, an uppercase
/// letter, a digit, and one of `$@#&!`.
pub fn calculate_strength(password: &str) -> u8 {
    let mut strength = 0;
    if password.len() >= 8 {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if password.chars().any(|c| "$@#&!".contains(c)) {
        strength += 1;
    }
    strength
}

fn strength_label(strength: u8) -> &'static str {
    match strength {
        0 => "Very Weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "Very Strong",
    }
}

#[function_component(PasswordStrengthBar)]
pub fn password_strength_bar(props: &PasswordStrengthBarProps) -> Html {
    if props.password.is_empty() {
        return html! {};
    }

    let strength = calculate_strength(&props.password);
    let percent = u32::from(strength) * 100 / 5;
    let tone = if strength > 2 { "good" } else { "bad" };

    html! {
        <div class="strength-bar">
            <div class="strength-track">
                <div
                    class={classes!("strength-fill", tone)}
                    style={format!("width: {}%", percent)}
                ></div>
            </div>
            <p class={classes!("strength-label", tone)}>{ strength_label(strength) }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(calculate_strength(""), 0);
    }

    #[test]
    fn lowercase_only_scores_one() {
        assert_eq!(calculate_strength("abc"), 1);
    }

    #[test]
    fn length_counts_separately_from_classes() {
        // 8 chars, all lowercase: length + lowercase
        assert_eq!(calculate_strength("abcdefgh"), 2);
    }

    #[test]
    fn full_house_scores_five() {
        assert_eq!(calculate_strength("Abcdef1!"), 5);
    }

    #[test]
    fn only_listed_symbols_count() {
        assert_eq!(calculate_strength("Abcdef1%"), 4);
        assert_eq!(calculate_strength("Abcdef1#"), 5);
    }
}
