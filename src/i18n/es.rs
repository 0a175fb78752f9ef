use super::Messages;

pub const ES: Messages = Messages {
    title: "Iniciar sesión",
    username: "Usuario",
    password: "Contraseña",
    login: "Acceder",
    username_required: "El usuario es obligatorio",
    password_required: "La contraseña es obligatoria",
    user_not_found: "Usuario incorrecto",
    wrong_password: "Contraseña incorrecta",
    validation_failed: "Se ha producido un error en la validación de los datos introducidos",
    forgot_password: "¿Has olvidado tu contraseña?",
    recovery_title: "Restablecimiento de contraseña",
    recovery_placeholder: "Introduce el Email asociado a tu cuenta",
    recovery_submit: "Enviar",
    recovery_close: "Cerrar",
    invalid_email: "Error: Introduce un correo válido",
    recovery_success: "Formulario enviado con éxito",
    language_es: "Español",
    language_en: "Inglés",
    dark_mode: "Modo oscuro",
    light_mode: "Modo claro",
};
